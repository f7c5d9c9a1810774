//! Precomputed tables

/// Deterministic Miller-Rabin witness sets. Each entry is `(threshold, witnesses)`, the witnesses
/// being proven sufficient for every odd n < threshold. Entries are sorted by threshold, and the
/// first entry whose threshold exceeds n is the one to use.
///
/// References:
/// - <https://oeis.org/A014233>
/// - Jaeschke, G. (1993). On strong pseudoprimes to several bases.
///   Mathematics of Computation, 61(204), 915-926.
pub const MILLER_RABIN_WITNESSES: [(u64, &[u64]); 10] = [
    (2_047, &[2]),
    (1_373_653, &[2, 3]),
    (9_080_191, &[31, 73]),
    (25_326_001, &[2, 3, 5]),
    (3_215_031_751, &[2, 3, 5, 7]),
    (4_759_123_141, &[2, 7, 61]),
    (1_122_004_669_633, &[2, 13, 23, 1_662_803]),
    (2_152_302_898_747, &[2, 3, 5, 7, 11]),
    (3_474_749_660_383, &[2, 3, 5, 7, 11, 13]),
    (341_550_071_728_321, &[2, 3, 5, 7, 11, 13, 17]),
];

/// Smallest number for which no witness set in [MILLER_RABIN_WITNESSES] applies
pub const MAX_DETERMINISTIC: u64 = 341_550_071_728_321;

pub const SMALL_PRIMES: [u16; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];
