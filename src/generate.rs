//! Sequences built from callbacks, copies and windows.
use itertools::repeat_n;

use crate::{
    container::{Container, Sequence, append, concat},
    error::GenerateError,
};

///`generate(f, 3) == [f(), f(), f()]`, calling `f` in order.
pub fn generate<C, T, F>(mut f: F, amount: usize) -> C
where
    C: Container<T>,
    F: FnMut() -> T,
{
    let mut ys = C::with_capacity(amount);
    for _ in 0..amount {
        ys.push(f());
    }
    ys
}

///`generate_by_idx(f, 3) == [f(0), f(1), f(2)]`
pub fn generate_by_idx<C, T, F>(f: F, amount: usize) -> C
where
    C: Container<T>,
    F: FnMut(usize) -> T,
{
    C::from_elements((0..amount).map(f))
}

///`repeat(3, [1, 2]) == [1, 2, 1, 2, 1, 2]`
pub fn repeat<C>(n: usize, xs: &C) -> C
where
    C: Sequence + Container<<C as Sequence>::Item>,
{
    concat(repeat_n(xs, n).map(|x| x.elements()))
}

///`replicate(3, 1) == [1, 1, 1]`
pub fn replicate<C, T>(n: usize, x: T) -> C
where
    C: Container<T>,
    T: Clone,
{
    C::from_elements(repeat_n(x, n))
}

///Every window of `length` consecutive elements, left to right.
///
///`infixes(3, [1,2,3,4,5,6]) == [[1,2,3], [2,3,4], [3,4,5], [4,5,6]]`
///
///Empty if `xs` is shorter than `length`. Panics if `length` is zero; see [`try_infixes`].
pub fn infixes<S, W>(length: usize, xs: &S) -> Vec<W>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    W: Container<S::Item>,
{
    assert!(length > 0, "Infix length must be greater than zero");
    let elements: Vec<S::Item> = xs.convert();
    if elements.len() < length {
        return vec![];
    }
    (0..=elements.len() - length)
        .map(|i| elements.range(i, i + length))
        .collect()
}

///[`infixes`], with a zero `length` reported as an error.
pub fn try_infixes<S, W>(length: usize, xs: &S) -> Result<Vec<W>, GenerateError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    W: Container<S::Item>,
{
    if length == 0 {
        return Err(GenerateError::ZeroInfixLength);
    }
    Ok(infixes(length, xs))
}

///Pad `xs` on the left with `x` up to `min_size` elements.
///
///`fill_left(0, 6, [1,2,3,4]) == [0,0,1,2,3,4]`
pub fn fill_left<C>(x: <C as Sequence>::Item, min_size: usize, xs: &C) -> C
where
    C: Sequence + Container<<C as Sequence>::Item> + Clone,
    <C as Sequence>::Item: Clone,
{
    let size = xs.size();
    if min_size <= size {
        return xs.clone();
    }
    append(repeat_n(x, min_size - size), xs.elements())
}

///Pad `xs` on the right with `x` up to `min_size` elements.
///
///`fill_right(0, 6, [1,2,3,4]) == [1,2,3,4,0,0]`
pub fn fill_right<C>(x: <C as Sequence>::Item, min_size: usize, xs: &C) -> C
where
    C: Sequence + Container<<C as Sequence>::Item> + Clone,
    <C as Sequence>::Item: Clone,
{
    let size = xs.size();
    if min_size <= size {
        return xs.clone();
    }
    append(xs.elements(), repeat_n(x, min_size - size))
}
