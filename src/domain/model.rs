use std::any::Any;
use std::cell::{Ref, RefCell};
use std::ops::Deref;
use std::rc::Rc;

/// Wraps a sequence of integers handed over by the caller.
///
/// A holder built with [`Holder::shared`] keeps the caller's handle, so
/// later mutation through that handle shows up in [`Holder::numbers`].
/// [`Holder::new`] takes the vector by value and nobody else can see it;
/// cloning such a holder copies the numbers.
#[derive(Debug, Clone)]
pub struct Holder {
    numbers: Numbers,
}

#[derive(Debug, Clone)]
enum Numbers {
    Owned(Vec<i32>),
    Shared(Rc<RefCell<Vec<i32>>>),
}

/// Read-only view returned by [`Holder::numbers`].
pub enum NumbersRef<'a> {
    Owned(&'a [i32]),
    Shared(Ref<'a, Vec<i32>>),
}

impl Deref for NumbersRef<'_> {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        match self {
            NumbersRef::Owned(numbers) => *numbers,
            NumbersRef::Shared(numbers) => numbers.as_slice(),
        }
    }
}

impl Default for Holder {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Holder {
    pub fn new(numbers: Vec<i32>) -> Self {
        Self {
            numbers: Numbers::Owned(numbers),
        }
    }

    pub fn shared(numbers: Rc<RefCell<Vec<i32>>>) -> Self {
        Self {
            numbers: Numbers::Shared(numbers),
        }
    }

    pub fn is_shared(&self) -> bool {
        matches!(self.numbers, Numbers::Shared(_))
    }

    /// Borrows the backing sequence itself, not a copy.
    ///
    /// Panics if a shared handle is mutably borrowed elsewhere at the time.
    pub fn numbers(&self) -> NumbersRef<'_> {
        match &self.numbers {
            Numbers::Owned(numbers) => NumbersRef::Owned(numbers),
            Numbers::Shared(numbers) => NumbersRef::Shared(numbers.borrow()),
        }
    }

    pub fn snapshot(&self) -> Vec<i32> {
        self.numbers().to_vec()
    }
}

/// Lookup key compared by its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    id: i32,
}

impl Key {
    pub fn new(id: i32) -> Self {
        Self { id }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    /// Type-checked comparison against an arbitrary value.
    pub fn equals_any(&self, other: Option<&dyn Any>) -> bool {
        match other.and_then(|o| o.downcast_ref::<Key>()) {
            Some(key) => self == key,
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopOutcome {
    Popped(String),
    Empty,
    Failed(String),
}

impl PopOutcome {
    pub fn is_popped(&self) -> bool {
        matches!(self, PopOutcome::Popped(_))
    }
}
