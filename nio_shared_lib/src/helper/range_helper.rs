use crate::error::{ErrorType, Result};

/// check that `i` is inside `[0, bound)`
pub fn check_index(i: usize, bound: usize) -> Result<usize> {
    if i < bound {
        Ok(i)
    } else {
        Err(ErrorType::OutOfBounds { index: i, bound })
    }
}

/// check that `start..end` is an ordered range that ends at or before `bound`
pub fn check_sub_range(start: usize, end: usize, bound: usize) -> Result<()> {
    if end > bound {
        Err(ErrorType::OutOfBounds { index: end, bound })
    } else if start > end {
        Err(ErrorType::OutOfBounds { index: start, bound: end })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::helper::range_helper::{check_index, check_sub_range};
    use crate::error::ErrorType;
    use test_case::test_case;

    #[test_case(0, 4, true; "first")]
    #[test_case(3, 4, true; "last")]
    #[test_case(4, 4, false; "at bound")]
    #[test_case(0, 0, false; "empty")]
    fn index(i: usize, bound: usize, ok: bool) {
        assert_eq!(check_index(i, bound).is_ok(), ok);
    }

    #[test]
    fn sub_range() {
        assert_eq!(check_sub_range(0, 0, 0), Ok(()));
        assert_eq!(check_sub_range(1, 3, 3), Ok(()));
        assert_eq!(check_sub_range(1, 4, 3), Err(ErrorType::OutOfBounds { index: 4, bound: 3 }));
        assert_eq!(check_sub_range(3, 2, 3), Err(ErrorType::OutOfBounds { index: 3, bound: 2 }));
    }
}
