//! Common utility functions

/// Check whether two references point to the same object.
pub(crate) fn same_instance<A, B>(a: &A, b: &B) -> bool {
    std::ptr::addr_of!(*a) as usize == std::ptr::addr_of!(*b) as usize
}
