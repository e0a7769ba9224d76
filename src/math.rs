/// Linear interpolation between `a` and `b`. `t` is not restricted to
/// [0,1]; values outside extrapolate.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Where `value` sits between `a` and `b`, as a ratio. Returns 0.0 when
/// `a == b` ("no progress" rather than a division by zero).
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if a == b {
        return 0.0;
    }
    (value - a) / (b - a)
}

/// `inverse_lerp` with the result clamped to [0,1].
pub fn inverse_lerp_clamped(a: f64, b: f64, value: f64) -> f64 {
    clamp(inverse_lerp(a, b, value), 0.0, 1.0)
}

/// Clamp without panicking on inverted bounds (`min` wins).
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    min.max(value.min(max))
}

/// Inclusive on both ends.
pub fn is_between(value: f64, min: f64, max: f64) -> bool {
    min <= value && value <= max
}

/// Uniform sample in [min, max). Used for visual jitter only.
pub fn random_range(rng: &mut fastrand::Rng, min: f64, max: f64) -> f64 {
    lerp(min, max, rng.f64())
}

/// Seeded FNV-1a 64. Derives stable per-instance seeds from a global seed
/// plus a name, so jitter state is reproducible per mount.
pub fn stable_hash64(seed: u64, s: &str) -> u64 {
    let mut h = 0xcbf2_9ce4_8422_2325u64 ^ seed;
    for &b in s.as_bytes() {
        h ^= u64::from(b);
        h = h.wrapping_mul(0x0000_0100_0000_01B3);
    }
    h
}
