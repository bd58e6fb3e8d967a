//! The shared cartesian product engine.
//!
//! Both expansion paths reduce to the same shape: an ordered list of axes, each an
//! ordered list of elements, folded left to right into one accumulator per
//! combination. The matrix path folds raw pairs into pair lists; the unpivot path
//! folds pre-built records by merging them.
//!
//! Ordering contract: the first axis varies slowest, the last axis fastest
//! (nested-loop order). An empty axis annihilates the whole product, and zero
//! axes yield zero combinations.

/// Fold `axes` into their cartesian product.
///
/// `seed` lifts an element of the first axis into an accumulator; `combine`
/// extends a partial accumulator with an element of the next axis. The fold is
/// iterative, so the axis count never bounds stack depth.
pub fn cartesian_fold<T, A, S, F>(axes: &[Vec<T>], seed: S, mut combine: F) -> Vec<A>
where
    S: FnMut(&T) -> A,
    F: FnMut(&A, &T) -> A,
{
    let Some((first, rest)) = axes.split_first() else {
        return Vec::new();
    };

    let mut acc: Vec<A> = first.iter().map(seed).collect();
    for axis in rest {
        if acc.is_empty() {
            break;
        }
        let mut next = Vec::with_capacity(acc.len().saturating_mul(axis.len()));
        for partial in &acc {
            for item in axis {
                next.push(combine(partial, item));
            }
        }
        acc = next;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(axes = axes.len(), combinations = acc.len(), "cartesian product");

    acc
}

/// Cartesian product as flat lists: one `Vec<T>` per combination, in axis order.
pub fn cartesian_product<T: Clone>(axes: &[Vec<T>]) -> Vec<Vec<T>> {
    cartesian_fold(
        axes,
        |item| {
            let mut combo = Vec::with_capacity(axes.len());
            combo.push(item.clone());
            combo
        },
        |partial, item| {
            let mut combo = partial.clone();
            combo.push(item.clone());
            combo
        },
    )
}

/// Number of combinations a product over axes of these lengths yields.
///
/// Zero axes yield zero; saturates at `usize::MAX` instead of overflowing.
pub fn product_size<I>(axis_lens: I) -> usize
where
    I: IntoIterator<Item = usize>,
{
    let mut lens = axis_lens.into_iter().peekable();
    if lens.peek().is_none() {
        return 0;
    }
    lens.fold(1usize, |acc, len| acc.saturating_mul(len))
}
