pub mod unicode;

/// `1 task`, `3 tasks`
pub fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
