//! Interval merging
//!
//! Detector outputs for one sentence arrive as an unordered pile of
//! possibly overlapping intervals. Before any excuse decision they
//! are merged into a canonical, ordered, non-overlapping coverage
//! set. Merging is closed at the end: an interval whose start equals
//! the current end is coalesced, not pushed.

use crate::span::Span;

/// Merge overlapping intervals into a minimal ordered coverage set
///
/// Sorts by start (stable, so ties keep input order) and scans left
/// to right, extending the top interval's end via `max` whenever the
/// next interval starts within `[top.start, top.end]`. Empty input
/// yields empty output. The result is ordered by start, pairwise
/// non-overlapping, and covers exactly the union of the input points.
pub fn merge_intervals(intervals: &[(usize, usize)]) -> Vec<(usize, usize)> {
    if intervals.is_empty() {
        return Vec::new();
    }

    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|iv| iv.0);

    let mut stack: Vec<(usize, usize)> = Vec::with_capacity(sorted.len());
    stack.push(sorted[0]);

    for &(start, end) in &sorted[1..] {
        let top = stack.last_mut().expect("stack is never empty here");
        if start <= top.1 {
            top.1 = top.1.max(end);
        } else {
            stack.push((start, end));
        }
    }

    stack
}

/// Merge spans for one sentence into coverage spans
///
/// The merged spans regain their text by slicing `sentence` at the
/// merged offsets (sentence-relative). Labels are not preserved:
/// several source spans with different labels may have contributed to
/// one merged interval, so merged spans are coverage markers, not
/// re-labeled entities.
pub fn merge_spans(sentence: &str, spans: &[Span]) -> Vec<Span> {
    let intervals: Vec<(usize, usize)> = spans.iter().map(|s| (s.start, s.end)).collect();

    merge_intervals(&intervals)
        .into_iter()
        .map(|(start, end)| {
            let text = sentence.get(start..end).unwrap_or_default().to_string();
            Span::new(start, end, text, "")
        })
        .collect()
}
