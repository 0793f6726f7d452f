use std::num::NonZeroU32;

fn available_threads() -> NonZeroU32 {
    std::thread::available_parallelism()
        .ok()
        .and_then(|n| NonZeroU32::new(u32::try_from(n.get()).unwrap_or(u32::MAX)))
        .unwrap_or(NonZeroU32::MIN)
}

/// Picks how many workers render a frame `image_height` rows tall.
///
/// Uses `requested` when given, the host's available parallelism otherwise,
/// and never more workers than there are rows.
#[must_use]
pub fn calculate_worker_count(image_height: u32, requested: Option<NonZeroU32>) -> NonZeroU32 {
    let workers = requested.unwrap_or_else(available_threads);

    NonZeroU32::new(workers.get().min(image_height)).unwrap_or(NonZeroU32::MIN)
}
