//! Random point generation, intended for use in testing.

use super::{G1, G2};
use pairing::{bn256, CurveProjective as _};
use rand::{distributions::Standard, prelude::Distribution, Rng, RngCore};
use rand04::Rand;

struct RngWrapper<R>(R);

impl<R: RngCore> rand04::Rng for RngWrapper<R> {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }
}

impl Distribution<G1> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> G1 {
        let p = bn256::G1::rand(&mut RngWrapper(rng));
        G1(p.into_affine())
    }
}

impl Distribution<G2> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> G2 {
        let p = bn256::G2::rand(&mut RngWrapper(rng));
        G2(p.into_affine())
    }
}
