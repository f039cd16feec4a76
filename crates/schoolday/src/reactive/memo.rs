/// Caches the output of a derivation for the last input it saw.
///
/// The derivation only runs again when the input compares unequal to the
/// previous one.
#[derive(Debug, Clone)]
pub struct Memo<I, O> {
    last: Option<(I, O)>,
    recomputations: usize,
}

impl<I, O> Memo<I, O>
where
    I: PartialEq + Clone,
{
    /// Creates an empty memo.
    pub fn new() -> Self {
        Self {
            last: None,
            recomputations: 0,
        }
    }

    /// Returns the cached output for `input`, deriving it if the input changed.
    pub fn get<F>(&mut self, input: &I, derive: F) -> &O
    where
        F: FnOnce(&I) -> O,
    {
        if self.last.as_ref().is_some_and(|(last, _)| last != input) {
            self.last = None;
        }
        if self.last.is_none() {
            self.recomputations += 1;
        }
        let (_, output) = self
            .last
            .get_or_insert_with(|| (input.clone(), derive(input)));
        output
    }

    /// Number of times the derivation has run.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    /// Drops the cached value.
    pub fn clear(&mut self) {
        self.last = None;
    }
}

impl<I, O> Default for Memo<I, O>
where
    I: PartialEq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
