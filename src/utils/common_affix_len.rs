use core::ops::{Index, Range};

/// Length of the common prefix of `old[old_range]` and `new[new_range]`.
/// Based on <https://github.com/mitsuhiko/similar/blob/7e15c44de11a1cd61e1149189929e189ef977fd8/src/algorithms/utils.rs>
pub fn common_prefix_len<Old, New>(
    old: &Old,
    old_range: Range<usize>,
    new: &New,
    new_range: Range<usize>,
) -> usize
where
    Old: Index<usize> + ?Sized,
    New: Index<usize> + ?Sized,
    New::Output: PartialEq<Old::Output>,
{
    new_range
        .zip(old_range)
        .take_while(|&(new_index, old_index)| new[new_index] == old[old_index])
        .count()
}

/// Length of the common suffix of `old[old_range]` and `new[new_range]`.
pub fn common_suffix_len<Old, New>(
    old: &Old,
    old_range: Range<usize>,
    new: &New,
    new_range: Range<usize>,
) -> usize
where
    Old: Index<usize> + ?Sized,
    New: Index<usize> + ?Sized,
    New::Output: PartialEq<Old::Output>,
{
    new_range
        .rev()
        .zip(old_range.rev())
        .take_while(|&(new_index, old_index)| new[new_index] == old[old_index])
        .count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn chars(text: &str) -> Vec<char> { text.chars().collect() }

    #[test]
    fn test_common_prefix_len() {
        let (empty, hello, help) = (chars(""), chars("hello wörld"), chars("help wörld"));

        assert_eq!(common_prefix_len(&empty[..], 0..0, &empty[..], 0..0), 0);
        assert_eq!(common_prefix_len(&hello[..], 0..11, &help[..], 0..10), 3);
        assert_eq!(common_prefix_len(&hello[..], 5..11, &help[..], 4..10), 6);
        assert_eq!(common_prefix_len(&hello[..], 0..11, &empty[..], 0..0), 0);
    }

    #[test]
    fn test_common_suffix_len() {
        let (empty, hello, help) = (chars(""), chars("hello wörld"), chars("help wörld"));

        assert_eq!(common_suffix_len(&empty[..], 0..0, &empty[..], 0..0), 0);
        assert_eq!(common_suffix_len(&hello[..], 0..11, &help[..], 0..10), 6);
        assert_eq!(common_suffix_len(&hello[..], 0..3, &help[..], 0..3), 3);
        assert_eq!(common_suffix_len(&hello[..], 0..4, &help[..], 0..4), 0);
    }
}
