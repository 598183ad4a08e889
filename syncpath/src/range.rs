//! Byte range partitioning for chunked transfers.
//!
//! This module splits a byte stream of known length into numbered,
//! contiguous parts. The transfer layer maps each [`SplitRange`] onto its own
//! wire protocol (multipart uploads, ranged GETs and so on).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One contiguous slice `[start, end)` of a byte stream.
///
/// `part_num` is 1-based and follows emission order.
///
/// # Examples
///
/// ```
/// use syncpath::SplitRange;
///
/// let range = SplitRange { part_num: 2, start: 3, end: 6 };
/// assert_eq!(range.len(), 3);
/// assert!(range.contains(5));
/// assert!(!range.contains(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitRange {
    /// 1-based part number.
    pub part_num: u64,
    /// First byte of the part.
    pub start: u64,
    /// One past the last byte of the part.
    pub end: u64,
}

impl SplitRange {
    /// Number of bytes in this part.
    ///
    /// An inverted range (`start > end`) holds no bytes.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the part holds no bytes.
    ///
    /// Of the ranges [`split_ranges`] emits, only the single part of an
    /// empty stream is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `offset` falls inside this part.
    #[must_use]
    pub const fn contains(&self, offset: u64) -> bool {
        self.start <= offset && offset < self.end
    }
}

impl fmt::Display for SplitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "part {} [{}, {})", self.part_num, self.start, self.end)
    }
}

/// Number of parts [`split_ranges`] produces for the given sizes.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `bytes_each_part` is zero.
///
/// # Examples
///
/// ```
/// use syncpath::range::part_count;
///
/// assert_eq!(part_count(10, 3).unwrap(), 4);
/// assert_eq!(part_count(9, 3).unwrap(), 3);
/// assert_eq!(part_count(0, 3).unwrap(), 1);
/// ```
pub fn part_count(bytes_total: u64, bytes_each_part: u64) -> Result<u64> {
    check_part_size(bytes_each_part)?;
    if bytes_each_part >= bytes_total {
        return Ok(1);
    }
    Ok(bytes_total.div_ceil(bytes_each_part))
}

/// Split `bytes_total` bytes into parts of `bytes_each_part` bytes.
///
/// Every part but the last is exactly `bytes_each_part` long; the last one
/// takes the remainder. When one part is enough, including for an empty
/// stream, a single range `[0, bytes_total)` is returned.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `bytes_each_part` is zero.
///
/// # Examples
///
/// ```
/// use syncpath::range::{split_ranges, SplitRange};
///
/// let ranges = split_ranges(10, 3).unwrap();
/// assert_eq!(
///     ranges,
///     vec![
///         SplitRange { part_num: 1, start: 0, end: 3 },
///         SplitRange { part_num: 2, start: 3, end: 6 },
///         SplitRange { part_num: 3, start: 6, end: 9 },
///         SplitRange { part_num: 4, start: 9, end: 10 },
///     ]
/// );
///
/// assert_eq!(
///     split_ranges(5, 10).unwrap(),
///     vec![SplitRange { part_num: 1, start: 0, end: 5 }]
/// );
/// ```
pub fn split_ranges(bytes_total: u64, bytes_each_part: u64) -> Result<Vec<SplitRange>> {
    let how_many = part_count(bytes_total, bytes_each_part)?;

    let ranges = (0..how_many)
        .map(|i| {
            let start = i * bytes_each_part;
            SplitRange {
                part_num: i + 1,
                start,
                end: start.saturating_add(bytes_each_part).min(bytes_total),
            }
        })
        .collect();

    Ok(ranges)
}

fn check_part_size(bytes_each_part: u64) -> Result<()> {
    if bytes_each_part == 0 {
        return Err(Error::InvalidArgument {
            argument: "bytes_each_part",
            reason: "part size must be greater than zero".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triples(ranges: &[SplitRange]) -> Vec<(u64, u64, u64)> {
        ranges.iter().map(|r| (r.part_num, r.start, r.end)).collect()
    }

    #[test]
    fn test_split_with_remainder() {
        let ranges = split_ranges(10, 3).unwrap();
        assert_eq!(
            triples(&ranges),
            vec![(1, 0, 3), (2, 3, 6), (3, 6, 9), (4, 9, 10)]
        );
    }

    #[test]
    fn test_split_exact_multiple() {
        let ranges = split_ranges(9, 3).unwrap();
        assert_eq!(triples(&ranges), vec![(1, 0, 3), (2, 3, 6), (3, 6, 9)]);
    }

    #[test]
    fn test_part_larger_than_total() {
        assert_eq!(triples(&split_ranges(5, 10).unwrap()), vec![(1, 0, 5)]);
    }

    #[test]
    fn test_part_equal_to_total() {
        assert_eq!(triples(&split_ranges(7, 7).unwrap()), vec![(1, 0, 7)]);
    }

    #[test]
    fn test_empty_stream_is_single_empty_part() {
        let ranges = split_ranges(0, 4).unwrap();
        assert_eq!(triples(&ranges), vec![(1, 0, 0)]);
        assert!(ranges[0].is_empty());
    }

    #[test]
    fn test_zero_part_size_is_invalid_argument() {
        let err = split_ranges(10, 0).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidArgument {
                argument: "bytes_each_part",
                ..
            }
        ));
        assert!(split_ranges(0, 0).is_err());
        assert!(part_count(10, 0).is_err());
    }

    #[test]
    fn test_one_byte_parts() {
        let ranges = split_ranges(3, 1).unwrap();
        assert_eq!(triples(&ranges), vec![(1, 0, 1), (2, 1, 2), (3, 2, 3)]);
    }

    #[test]
    fn test_huge_stream_does_not_overflow() {
        let ranges = split_ranges(u64::MAX, u64::MAX / 2).unwrap();
        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges.last().unwrap().end, u64::MAX);
    }

    #[test]
    fn test_range_helpers() {
        let range = SplitRange {
            part_num: 1,
            start: 10,
            end: 20,
        };
        assert_eq!(range.len(), 10);
        assert!(!range.is_empty());
        assert!(range.contains(10));
        assert!(range.contains(19));
        assert!(!range.contains(20));
        assert_eq!(range.to_string(), "part 1 [10, 20)");
    }

    #[test]
    fn test_serializes_with_camel_case() {
        let range = SplitRange {
            part_num: 3,
            start: 6,
            end: 9,
        };
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"partNum":3,"start":6,"end":9}"#);
        let back: SplitRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);
    }

    #[test]
    fn test_inverted_range_from_wire_is_empty() {
        let range: SplitRange =
            serde_json::from_str(r#"{"partNum":1,"start":5,"end":3}"#).unwrap();
        assert_eq!(range.len(), 0);
        assert!(range.is_empty());
        assert!(!range.contains(4));
    }

    // Property-based tests
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Ranges tile [0, total) exactly, in order
            #[test]
            fn ranges_tile_the_stream(total in 0u64..1_000_000, each in 1u64..100_000) {
                let ranges = split_ranges(total, each).unwrap();

                prop_assert!(!ranges.is_empty());
                prop_assert_eq!(ranges[0].start, 0);
                prop_assert_eq!(ranges[ranges.len() - 1].end, total);
                for pair in ranges.windows(2) {
                    prop_assert_eq!(pair[0].end, pair[1].start);
                    prop_assert!(pair[0].start < pair[1].start);
                }

                let covered: u64 = ranges.iter().map(SplitRange::len).sum();
                prop_assert_eq!(covered, total);
            }

            /// Part numbers are 1-based emission indices
            #[test]
            fn part_numbers_are_sequential(total in 0u64..1_000_000, each in 1u64..100_000) {
                let ranges = split_ranges(total, each).unwrap();
                for (i, range) in ranges.iter().enumerate() {
                    prop_assert_eq!(range.part_num, i as u64 + 1);
                }
                prop_assert_eq!(ranges.len() as u64, part_count(total, each).unwrap());
            }

            /// Only the last part may be shorter than the part size
            #[test]
            fn only_last_part_is_short(total in 1u64..1_000_000, each in 1u64..100_000) {
                let ranges = split_ranges(total, each).unwrap();
                let (last, rest) = ranges.split_last().unwrap();
                for range in rest {
                    prop_assert_eq!(range.len(), each);
                }
                prop_assert!(last.len() >= 1 && last.len() <= each);
            }
        }
    }
}
