/// Seconds passed since `since`, zero if `since` lies in the future
pub fn get_elapsed_time(current_time: u64, since: u64) -> u64 {
    current_time.saturating_sub(since)
}
