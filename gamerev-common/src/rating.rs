use std::collections::BTreeMap;

/// Highest star value a review can carry.
pub const MAX_STARS: u8 = 5;

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// One histogram bar: how many reviews gave `stars`, and how tall its bar is
/// relative to the busiest bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingBucket {
    pub stars: i32,
    pub count: usize,
    /// Bar height in percent, in `(0, 100]`.
    pub height_percent: f64,
}

/// Aggregate view over a list of star ratings.
///
/// Pure data structure: built once from the ratings, then only read. Star
/// values are kept as given; a value outside 1..=5 still gets its own bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingSummary {
    total: i64,
    review_count: usize,
    counts: BTreeMap<i32, usize>,
}

impl RatingSummary {
    pub fn from_star_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        let mut summary = Self::default();
        for point in points {
            summary.total += i64::from(point);
            summary.review_count += 1;
            *summary.counts.entry(point).or_insert(0) += 1;
        }
        summary
    }

    pub fn review_count(&self) -> usize {
        self.review_count
    }

    pub fn is_empty(&self) -> bool {
        self.review_count == 0
    }

    /// Arithmetic mean of all ratings, or 0 when there are none.
    pub fn average(&self) -> f64 {
        if self.review_count == 0 {
            return 0.0;
        }
        self.total as f64 / self.review_count as f64
    }

    /// Average rounded half-up to one decimal place, e.g. `"3.3"` or `"0.0"`.
    pub fn average_display(&self) -> String {
        let rounded = (self.average() * 10.0).round() / 10.0;
        format!("{:.1}", rounded)
    }

    /// Average rounded to the nearest whole star and clamped to `0..=5`.
    pub fn average_stars(&self) -> u8 {
        clamp_stars(self.average().round() as i64)
    }

    /// Count per star value, only for values that occur.
    pub fn counts(&self) -> &BTreeMap<i32, usize> {
        &self.counts
    }

    /// Largest bucket count, or 0 when there are no reviews.
    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Histogram bars in ascending star order. Empty when there are no
    /// reviews, so callers never divide by a zero maximum.
    pub fn buckets(&self) -> Vec<RatingBucket> {
        let max = self.max_count();
        if max == 0 {
            return Vec::new();
        }
        self.counts
            .iter()
            .map(|(&stars, &count)| RatingBucket {
                stars,
                count,
                height_percent: count as f64 / max as f64 * 100.0,
            })
            .collect()
    }
}

fn clamp_stars(value: i64) -> u8 {
    value.clamp(0, i64::from(MAX_STARS)) as u8
}

/// Render `rating` as five glyphs: filled stars followed by empty ones.
/// Values outside `0..=5` are clamped.
pub fn star_glyphs(rating: i32) -> String {
    let filled = clamp_stars(i64::from(rating)) as usize;
    let empty = MAX_STARS as usize - filled;
    let mut glyphs = String::with_capacity(MAX_STARS as usize * FILLED_STAR.len_utf8());
    glyphs.extend(std::iter::repeat(FILLED_STAR).take(filled));
    glyphs.extend(std::iter::repeat(EMPTY_STAR).take(empty));
    glyphs
}
