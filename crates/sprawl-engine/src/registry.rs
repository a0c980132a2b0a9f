//! Seed registry: one hue per region, drawn without collisions.

use std::fmt;

use indexmap::IndexMap;
use log::trace;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sprawl_core::{CellCoord, RegionId, TickId};

use crate::error::RegistryError;

/// Random draws attempted before falling back to a linear scan.
const MAX_RANDOM_DRAWS: usize = 32;

/// The seed that created a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Seed {
    /// Region id, which is also its hue.
    pub region: RegionId,
    /// Cell the seed was planted in.
    pub origin: CellCoord,
    /// Tick of the store generation the seed was planted into.
    pub created_at: TickId,
}

/// Active regions and the hue generator that names them.
///
/// Hues are drawn uniformly from `0..domain` and redrawn on collision.
/// After [`MAX_RANDOM_DRAWS`] misses the registry scans forward from a
/// random offset instead, so allocation always terminates and still
/// depends only on the RNG seed.
pub struct SeedRegistry {
    domain: u16,
    rng_seed: u64,
    rng: ChaCha8Rng,
    seeds: IndexMap<RegionId, Seed>,
}

impl SeedRegistry {
    /// An empty registry drawing hues from `0..hue_domain`.
    pub fn new(hue_domain: u16, rng_seed: u64) -> Self {
        Self {
            domain: hue_domain,
            rng_seed,
            rng: ChaCha8Rng::seed_from_u64(rng_seed),
            seeds: IndexMap::new(),
        }
    }

    /// Size of the hue domain.
    pub fn domain(&self) -> u16 {
        self.domain
    }

    /// Allocate a fresh hue and register a seed at `origin`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::HueDomainExhausted`] if every hue is in use.
    pub fn create_seed(
        &mut self,
        origin: CellCoord,
        created_at: TickId,
    ) -> Result<RegionId, RegistryError> {
        if self.seeds.len() >= usize::from(self.domain) {
            return Err(RegistryError::HueDomainExhausted {
                domain: self.domain,
            });
        }
        let hue = self.draw_free_hue();
        self.insert(RegionId(hue), origin, created_at);
        Ok(RegionId(hue))
    }

    /// Register a seed with an explicit hue.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::HueOutOfDomain`] if `hue >= domain`
    /// - [`RegistryError::HueInUse`] if another region has it
    pub fn register_with_hue(
        &mut self,
        origin: CellCoord,
        hue: u16,
        created_at: TickId,
    ) -> Result<RegionId, RegistryError> {
        if hue >= self.domain {
            return Err(RegistryError::HueOutOfDomain {
                hue,
                domain: self.domain,
            });
        }
        if self.seeds.contains_key(&RegionId(hue)) {
            return Err(RegistryError::HueInUse { hue });
        }
        self.insert(RegionId(hue), origin, created_at);
        Ok(RegionId(hue))
    }

    /// Caller guarantees at least one hue is free.
    fn draw_free_hue(&mut self) -> u16 {
        for _ in 0..MAX_RANDOM_DRAWS {
            let hue = self.rng.random_range(0..self.domain);
            if !self.seeds.contains_key(&RegionId(hue)) {
                return hue;
            }
        }
        let offset = self.rng.random_range(0..self.domain);
        let domain = u32::from(self.domain);
        (0..domain)
            .map(|i| ((u32::from(offset) + i) % domain) as u16)
            .find(|&h| !self.seeds.contains_key(&RegionId(h)))
            .unwrap_or(offset)
    }

    fn insert(&mut self, region: RegionId, origin: CellCoord, created_at: TickId) {
        trace!("region {region} seeded at {origin} on tick {created_at}");
        self.seeds.insert(
            region,
            Seed {
                region,
                origin,
                created_at,
            },
        );
    }

    /// Number of active regions.
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    /// Whether no region is active.
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// Whether `region` is active.
    pub fn contains(&self, region: RegionId) -> bool {
        self.seeds.contains_key(&region)
    }

    /// The seed of `region`.
    pub fn get(&self, region: RegionId) -> Option<&Seed> {
        self.seeds.get(&region)
    }

    /// Seeds in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Seed> + '_ {
        self.seeds.values()
    }

    /// Active region ids in creation order.
    pub fn regions(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.seeds.keys().copied()
    }

    /// Forget every region and restart the hue sequence from the
    /// original RNG seed.
    pub fn clear(&mut self) {
        self.seeds.clear();
        self.rng = ChaCha8Rng::seed_from_u64(self.rng_seed);
    }
}

impl fmt::Debug for SeedRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedRegistry")
            .field("domain", &self.domain)
            .field("rng_seed", &self.rng_seed)
            .field("regions", &self.seeds.len())
            .finish()
    }
}
