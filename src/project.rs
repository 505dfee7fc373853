use crate::container::Container;

///Look up every position of `indices` in `elements`, keeping slot order.
///
///Panics if a position is out of bounds, which can only happen if the tuple was made for a
///different sequence.
pub fn project<T: Clone, Out: Container<T>>(indices: &[usize], elements: &[T]) -> Out {
    let mut out = Out::with_capacity(indices.len());
    for &i in indices {
        out.push(elements[i].clone());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_keeps_slot_order() {
        let elements = ['a', 'b', 'c'];
        let s: String = project(&[2, 0, 2], &elements);
        assert_eq!(s, "cac");
        let v: Vec<char> = project(&[], &elements);
        assert!(v.is_empty());
    }

    #[test]
    #[should_panic]
    fn out_of_bounds() {
        let _: Vec<i32> = project(&[3], &[1, 2, 3]);
    }
}
