//! Sequential concatenation of several sources.
//!
//! Two flavours are provided:
//!
//! - [`concat`] takes a tuple of 1 to 8 views. Each source may have its own
//!   cursor type; the cursor is a generated enum with one variant per source,
//!   so dispatch is static. Items of later sources must convert `Into` the
//!   first source's item type. A tuple that does not satisfy this, or the
//!   empty tuple, does not compile.
//! - [`concat_dyn`] takes a runtime-sized list of [`BoxedView`]s and pays one
//!   indirection per element.
//!
//! Either way exactly one source is active at a time, identified by its
//! index, and empty sources are stepped over no matter how many are
//! adjacent.

use std::rc::Rc;

use loom_core::{BoxedCursor, BoxedView, Cursor, Precondition, View, ViewResult};

/// Concatenation of the views in the tuple `T`.
///
/// # Examples
/// ```
/// use loom_core::{empty, Shared, View};
/// use loom_iter::concat;
///
/// let joined = concat((
///     empty::<i32>(),
///     Shared::new(vec![1, 2]),
///     empty::<i32>(),
///     Shared::new(vec![3]),
/// ));
/// assert_eq!(joined.to_vec(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Concat<T> {
    views: T,
}

/// Concatenates a tuple of views.
#[inline]
pub fn concat<T>(views: T) -> Concat<T>
where
    Concat<T>: View,
{
    Concat { views }
}

macro_rules! concat_tuple {
    ($cursor:ident, $active:ident, $arity:expr;
     $fidx:tt $fvar:ident $First:ident $(, $idx:tt $var:ident $T:ident)*) => {
        /// The source a concat cursor is walking, with a cursor into it.
        #[derive(Debug, Clone)]
        pub enum $active<$First, $($T),*> {
            #[doc = concat!("Walking source ", stringify!($fidx))]
            $fvar($First),
            $(
                #[doc = concat!("Walking source ", stringify!($idx))]
                $var($T),
            )*
        }

        /// Cursor over a [`Concat`] view.
        pub struct $cursor<$First: View, $($T: View),*> {
            views: ($First, $($T,)*),
            active: $active<$First::Cursor, $($T::Cursor),*>,
        }

        impl<$First: View, $($T: View),*> Clone for $cursor<$First, $($T),*> {
            fn clone(&self) -> Self {
                $cursor {
                    views: self.views.clone(),
                    active: self.active.clone(),
                }
            }
        }

        impl<$First, $($T),*> $cursor<$First, $($T),*>
        where
            $First: View,
            $($T: View, $T::Item: Into<$First::Item>,)*
        {
            const LAST: usize = $arity - 1;

            /// Index of the source currently being walked.
            #[inline]
            pub fn active_source(&self) -> usize {
                match self.active {
                    $active::$fvar(_) => $fidx,
                    $($active::$var(_) => $idx,)*
                }
            }

            #[inline]
            fn active_is_end(&self) -> bool {
                match &self.active {
                    $active::$fvar(c) => c.is_end(),
                    $($active::$var(c) => c.is_end(),)*
                }
            }

            fn open(&self, index: usize) -> $active<$First::Cursor, $($T::Cursor),*> {
                match index {
                    $fidx => $active::$fvar(self.views.$fidx.begin()),
                    $($idx => $active::$var(self.views.$idx.begin()),)*
                    _ => unreachable!("concat source index {index} out of range"),
                }
            }

            /// Steps over exhausted sources until one has elements or the
            /// last source is reached.
            fn skip_exhausted(&mut self) {
                while self.active_is_end() && self.active_source() < Self::LAST {
                    self.active = self.open(self.active_source() + 1);
                }
            }
        }

        impl<$First, $($T),*> Cursor for $cursor<$First, $($T),*>
        where
            $First: View,
            $($T: View, $T::Item: Into<$First::Item>,)*
        {
            type Item = $First::Item;

            #[inline]
            fn is_end(&self) -> bool {
                self.active_source() == Self::LAST && self.active_is_end()
            }

            #[inline]
            fn get(&self) -> Option<Self::Item> {
                match &self.active {
                    $active::$fvar(c) => c.get(),
                    $($active::$var(c) => c.get().map(Into::into),)*
                }
            }

            #[inline]
            fn advance(&mut self) {
                if self.is_end() {
                    return;
                }
                match &mut self.active {
                    $active::$fvar(c) => c.advance(),
                    $($active::$var(c) => c.advance(),)*
                }
                self.skip_exhausted();
            }
        }

        impl<$First, $($T),*> View for Concat<($First, $($T,)*)>
        where
            $First: View,
            $($T: View, $T::Item: Into<$First::Item>,)*
        {
            type Item = $First::Item;
            type Cursor = $cursor<$First, $($T),*>;

            fn begin(&self) -> Self::Cursor {
                let mut cursor = $cursor {
                    views: self.views.clone(),
                    active: $active::$fvar(self.views.$fidx.begin()),
                };
                cursor.skip_exhausted();
                cursor
            }
        }
    };
}

concat_tuple!(ConcatCursor1, Active1, 1; 0 S0 A);
concat_tuple!(ConcatCursor2, Active2, 2; 0 S0 A, 1 S1 B);
concat_tuple!(ConcatCursor3, Active3, 3; 0 S0 A, 1 S1 B, 2 S2 C);
concat_tuple!(ConcatCursor4, Active4, 4; 0 S0 A, 1 S1 B, 2 S2 C, 3 S3 D);
concat_tuple!(ConcatCursor5, Active5, 5; 0 S0 A, 1 S1 B, 2 S2 C, 3 S3 D, 4 S4 E);
concat_tuple!(ConcatCursor6, Active6, 6; 0 S0 A, 1 S1 B, 2 S2 C, 3 S3 D, 4 S4 E, 5 S5 F);
concat_tuple!(ConcatCursor7, Active7, 7; 0 S0 A, 1 S1 B, 2 S2 C, 3 S3 D, 4 S4 E, 5 S5 F, 6 S6 G);
concat_tuple!(ConcatCursor8, Active8, 8; 0 S0 A, 1 S1 B, 2 S2 C, 3 S3 D, 4 S4 E, 5 S5 F, 6 S6 G, 7 S7 H);

/// Concatenation of a runtime-sized list of type-erased views.
#[derive(Debug)]
pub struct DynConcat<T> {
    views: Rc<[BoxedView<T>]>,
}

impl<T> Clone for DynConcat<T> {
    fn clone(&self) -> Self {
        DynConcat {
            views: Rc::clone(&self.views),
        }
    }
}

/// Concatenates `views` in order.
///
/// # Errors
/// Returns [`Precondition::NoSources`] if `views` is empty.
pub fn concat_dyn<T>(views: Vec<BoxedView<T>>) -> ViewResult<DynConcat<T>> {
    if views.is_empty() {
        return Err(Precondition::NoSources.into());
    }
    Ok(DynConcat {
        views: views.into(),
    })
}

impl<T> DynConcat<T> {
    /// Number of sources.
    #[inline]
    pub fn sources(&self) -> usize {
        self.views.len()
    }
}

impl<T> View for DynConcat<T> {
    type Item = T;
    type Cursor = DynConcatCursor<T>;

    fn begin(&self) -> DynConcatCursor<T> {
        let mut cursor = DynConcatCursor {
            active: self.views[0].begin(),
            views: Rc::clone(&self.views),
            index: 0,
        };
        cursor.skip_exhausted();
        cursor
    }
}

/// Cursor over a [`DynConcat`] view.
#[derive(Debug)]
pub struct DynConcatCursor<T> {
    views: Rc<[BoxedView<T>]>,
    index: usize,
    active: BoxedCursor<T>,
}

impl<T> Clone for DynConcatCursor<T> {
    fn clone(&self) -> Self {
        DynConcatCursor {
            views: Rc::clone(&self.views),
            index: self.index,
            active: self.active.clone(),
        }
    }
}

impl<T> DynConcatCursor<T> {
    /// Index of the source currently being walked.
    #[inline]
    pub fn active_source(&self) -> usize {
        self.index
    }

    fn skip_exhausted(&mut self) {
        while self.active.is_end() && self.index + 1 < self.views.len() {
            self.index += 1;
            self.active = self.views[self.index].begin();
        }
    }
}

impl<T> Cursor for DynConcatCursor<T> {
    type Item = T;

    #[inline]
    fn is_end(&self) -> bool {
        self.index + 1 == self.views.len() && self.active.is_end()
    }

    #[inline]
    fn get(&self) -> Option<T> {
        self.active.get()
    }

    #[inline]
    fn advance(&mut self) {
        if self.is_end() {
            return;
        }
        self.active.advance();
        self.skip_exhausted();
    }
}
