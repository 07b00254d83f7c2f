use std::fmt::Debug;

use crate::types::location::Location;

/// An annotation anchored to the base text, such as a comment or an
/// apparatus entry. Only its location matters for reconciliation.
pub trait Fragment: Debug {
    fn location(&self) -> Location;

    fn set_location(&mut self, location: Location);
}

impl<F> Fragment for Box<F>
where
    F: Fragment + ?Sized,
{
    fn location(&self) -> Location { (**self).location() }

    fn set_location(&mut self, location: Location) { (**self).set_location(location); }
}
