/// A contiguous, never empty part of a [RootDecomposition](super::RootDecomposition).
///
/// `result` is the combination of `values`. An operand acting on the whole block is only
/// recorded in `pending`; it is pushed down into `values` and `result` before any access
/// to a part of the block.
#[derive(Debug, Clone)]
pub(super) struct Block<T> {
    values: Vec<T>,
    result: T,
    pending: Option<T>,
}

impl<T: Clone> Block<T> {
    pub(super) fn new(first: T) -> Self {
        Self {
            values: vec![first.clone()],
            result: first,
            pending: None,
        }
    }

    pub(super) fn len(&self) -> usize {
        self.values.len()
    }

    pub(super) fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub(super) fn add_new_element<F>(&mut self, element: T, f: &F)
    where
        F: Fn(&T, &T) -> T,
    {
        self.result = f(&self.result, &element);
        self.values.push(element);
    }

    /// The current value at `index`, pending operand included.
    pub(super) fn get<F>(&self, index: usize, f: &F) -> T
    where
        F: Fn(&T, &T) -> T,
    {
        match &self.pending {
            Some(pending) => f(&self.values[index], pending),
            None => self.values[index].clone(),
        }
    }

    fn push_down<F, E>(&mut self, f: &F, fexp: &E)
    where
        F: Fn(&T, &T) -> T,
        E: Fn(&T, &F, usize) -> T,
    {
        if let Some(pending) = self.pending.take() {
            log::trace!("pushing down pending operand into block of length {}", self.len());
            for value in self.values.iter_mut() {
                *value = f(value, &pending);
            }
            self.result = f(&self.result, &fexp(&pending, f, self.values.len()));
        }
    }

    /// Combination of all values, computed without pushing down.
    pub(super) fn full_result<F, E>(&self, f: &F, fexp: &E) -> T
    where
        F: Fn(&T, &T) -> T,
        E: Fn(&T, &F, usize) -> T,
    {
        match &self.pending {
            Some(pending) => f(&self.result, &fexp(pending, f, self.len())),
            None => self.result.clone(),
        }
    }

    /// Combination of the values at `from..=to`, from left to right.
    pub(super) fn part_result_on<F, E>(&mut self, from: usize, to: usize, f: &F, fexp: &E) -> T
    where
        F: Fn(&T, &T) -> T,
        E: Fn(&T, &F, usize) -> T,
    {
        self.push_down(f, fexp);
        let mut answer = self.values[from].clone();
        for value in &self.values[from + 1..=to] {
            answer = f(&answer, value);
        }
        answer
    }

    pub(super) fn act_on_entire_block<F>(&mut self, operand: &T, f: &F)
    where
        F: Fn(&T, &T) -> T,
    {
        self.pending = Some(match self.pending.take() {
            Some(pending) => f(&pending, operand),
            None => operand.clone(),
        });
    }

    pub(super) fn act_on_part_of_block<F, E>(
        &mut self,
        from: usize,
        to: usize,
        operand: &T,
        f: &F,
        fexp: &E,
    ) where
        F: Fn(&T, &T) -> T,
        E: Fn(&T, &F, usize) -> T,
    {
        self.push_down(f, fexp);
        for value in &mut self.values[from..=to] {
            *value = f(value, operand);
        }
        self.result = f(&self.result, &fexp(operand, f, to - from + 1));
    }
}
