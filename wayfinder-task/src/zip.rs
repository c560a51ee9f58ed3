use std::fmt;

use crate::Task;

/// Task for the [`zip`](crate::TaskExt::zip) combinator, running two tasks in sequence and
/// pairing their outputs.
#[derive(Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

impl<A, B> Zip<A, B> {
    pub(crate) fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A, B> Task for Zip<A, B>
where
    A: Task,
    B: Task<Error = A::Error>,
{
    type Output = (A::Output, B::Output);
    type Error = A::Error;

    fn run(&self) -> Result<Self::Output, A::Error> {
        let a = self.a.run()?;
        let b = self.b.run()?;
        Ok((a, b))
    }
}

impl<A: fmt::Debug, B: fmt::Debug> fmt::Debug for Zip<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Zip")
            .field("a", &self.a)
            .field("b", &self.b)
            .finish()
    }
}
