use randbeans_populate::{PopulationError, Populator, Value, ValueType};

/// Deterministic populator for scalar types.
///
/// Every request advances a counter; values are derived from it, wrapped at `modulus` when set so
/// that keys repeat.
#[derive(Clone, Debug, Default)]
pub struct CountingPopulator {
    counter: i64,
    modulus: Option<i64>,
    /// Every type requested so far, in order.
    pub requested: Vec<ValueType>,
}

impl CountingPopulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a populator whose values repeat every `modulus` requests.
    pub fn cycling(modulus: i64) -> Self {
        Self { modulus: Some(modulus), ..Default::default() }
    }

    fn next(&mut self) -> i64 {
        let n = self.counter;
        self.counter += 1;
        self.modulus.map_or(n, |m| n % m)
    }
}

impl Populator for CountingPopulator {
    fn populate(&mut self, ty: &ValueType) -> Result<Value, PopulationError> {
        let value = match ty {
            ValueType::Bool => Value::Bool(self.next() % 2 == 0),
            ValueType::Byte => Value::Byte(self.next() as i8),
            ValueType::Short => Value::Short(self.next() as i16),
            ValueType::Int => Value::Int(self.next() as i32),
            ValueType::Long => Value::Long(self.next()),
            ValueType::Char => Value::Char(char::from(b'a' + (self.next() % 26) as u8)),
            ValueType::String => Value::String(format!("s{}", self.next())),
            _ => return Err(PopulationError::Unsupported(ty.to_string())),
        };
        self.requested.push(ty.clone());
        Ok(value)
    }
}

/// Delegates to a [`CountingPopulator`] and fails once it has produced `successes` values.
#[derive(Clone, Debug)]
pub struct FailingPopulator {
    pub inner: CountingPopulator,
    successes: usize,
    error: PopulationError,
}

impl FailingPopulator {
    pub fn new(successes: usize, error: PopulationError) -> Self {
        Self { inner: CountingPopulator::new(), successes, error }
    }
}

impl Populator for FailingPopulator {
    fn populate(&mut self, ty: &ValueType) -> Result<Value, PopulationError> {
        if self.inner.requested.len() >= self.successes {
            return Err(self.error.clone());
        }
        self.inner.populate(ty)
    }
}
