///
/// Scale fractional ms positions in `[0, 1)` to integer base pair
/// coordinates on a segment of `segment_length` bp, writing them to
/// `resolved` in input order.
///
/// Each coordinate is `floor(p * segment_length)`. A coordinate that lands
/// on its predecessor's slot is moved one past the predecessor. The
/// predecessor's slot spans from its own scaled value up to where it was
/// moved to, so a run of identical fractions comes out as `x, x+1, x+2, ...`.
/// Positions are only compared to their immediate predecessor and are never
/// re-sorted: an out-of-order input stays out of order.
///
pub fn resolve_positions(fractional: &[f64], segment_length: u64, resolved: &mut Vec<u64>) {
    resolved.clear();
    resolved.reserve(fractional.len());

    let length = segment_length as f64;
    // (scaled, resolved) of the previous site
    let mut previous: Option<(u64, u64)> = None;

    for &fraction in fractional {
        let scaled = (fraction * length).floor() as u64;
        let position = match previous {
            Some((prev_scaled, prev_resolved)) if (prev_scaled..=prev_resolved).contains(&scaled) => {
                prev_resolved.saturating_add(1)
            }
            _ => scaled,
        };
        resolved.push(position);
        previous = Some((scaled, position));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn resolve(fractional: &[f64], segment_length: u64) -> Vec<u64> {
        let mut resolved = Vec::new();
        resolve_positions(fractional, segment_length, &mut resolved);
        resolved
    }

    #[rstest]
    fn test_scales_and_floors() {
        assert_eq!(
            resolve(&[0.1, 0.5, 0.9999999], 1_000_000),
            vec![100_000, 500_000, 999_999]
        );
    }

    #[rstest]
    fn test_collision_shifts_by_one() {
        assert_eq!(resolve(&[0.1234, 0.12345], 1000), vec![123, 124]);
    }

    #[rstest]
    fn test_repeated_fractions_cascade() {
        assert_eq!(
            resolve(&[0.1, 0.1, 0.1], 1_000_000),
            vec![100_000, 100_001, 100_002]
        );
    }

    #[rstest]
    fn test_cascade_absorbs_next_scaled_value() {
        // third site scales to 101, which the second site was already moved to
        assert_eq!(resolve(&[0.1, 0.1, 0.1015], 1000), vec![100, 101, 102]);
    }

    #[rstest]
    fn test_first_position_is_never_shifted() {
        assert_eq!(resolve(&[0.0, 0.0], 1000), vec![0, 1]);
    }

    #[rstest]
    fn test_out_of_order_input_is_not_sorted() {
        assert_eq!(resolve(&[0.5, 0.1], 1000), vec![500, 100]);
    }

    #[rstest]
    fn test_saturated_positions_do_not_overflow() {
        assert_eq!(
            resolve(&[f64::INFINITY, f64::INFINITY], 1000),
            vec![u64::MAX, u64::MAX]
        );
    }

    #[rstest]
    fn test_reuses_output_buffer() {
        let mut resolved = vec![7, 8, 9, 10];
        resolve_positions(&[0.25], 1000, &mut resolved);
        assert_eq!(resolved, vec![250]);
    }

    #[rstest]
    #[case(&[0.01, 0.011, 0.0111, 0.5, 0.50001, 0.99])]
    #[case(&[0.3, 0.3, 0.3, 0.3, 0.3001])]
    fn test_sorted_input_is_strictly_increasing(#[case] fractional: &[f64]) {
        let resolved = resolve(fractional, 1000);
        assert_eq!(resolved.len(), fractional.len());
        assert!(resolved.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
