use crate::sampler::Sums;
use crate::ErrorKind;

/// Integer mean of the sampled channels, truncated towards zero.
pub fn reduce(sums: &Sums) -> Result<(u8, u8, u8), ErrorKind> {
    if sums.count == 0 {
        return Err(ErrorKind::InvalidConfig);
    }

    let count = sums.count as u64;
    let mean = |sum: u64| (sum / count).min(u8::MAX as u64) as u8;

    Ok((mean(sums.r), mean(sums.g), mean(sums.b)))
}
