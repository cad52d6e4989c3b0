use rand::Rng;

/// Pick an index in `0..len` uniformly, never repeating `last` when more than
/// one candidate exists. Single draw, no retry loop.
pub fn pick_excluding<R: Rng>(rng: &mut R, len: usize, last: Option<usize>) -> Option<usize> {
    match (len, last) {
        (0, _) => None,
        (1, _) => Some(0),
        (_, Some(prev)) if prev < len => {
            let i = rng.gen_range(0..len - 1);
            Some(if i >= prev { i + 1 } else { i })
        }
        _ => Some(rng.gen_range(0..len)),
    }
}

/// Stateful wrapper remembering the previous pick.
#[derive(Clone, Debug, Default)]
pub struct NoRepeatPicker {
    last: Option<usize>,
}

impl NoRepeatPicker {
    pub fn next<R: Rng>(&mut self, rng: &mut R, len: usize) -> Option<usize> {
        let picked = pick_excluding(rng, len, self.last)?;
        self.last = Some(picked);
        Some(picked)
    }

    pub fn last(&self) -> Option<usize> {
        self.last
    }
}
