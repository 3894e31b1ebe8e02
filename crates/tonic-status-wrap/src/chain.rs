use std::error::Error;

/// Iterator over an error and every transitive `source()` below it.
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

pub fn chain<'a>(err: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let err = self.next?;
        self.next = err.source();
        Some(err)
    }
}

/// Finds the first error of concrete type `T` anywhere in the chain,
/// `err` itself included. This is how a capability carried by a deeper
/// error (a frame list, a redirect target) stays discoverable through any
/// number of wrappers.
pub fn find_in_chain<'a, T: Error + 'static>(err: &'a (dyn Error + 'static)) -> Option<&'a T> {
    chain(err).find_map(|err| err.downcast_ref::<T>())
}

/// Whether any error in the chain equals `target`.
pub fn chain_contains<T>(err: &(dyn Error + 'static), target: &T) -> bool
where
    T: Error + PartialEq + 'static,
{
    chain(err).any(|err| err.downcast_ref::<T>() == Some(target))
}
