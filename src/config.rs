/// Default number of slots in each evaluator stack.
pub const DEFAULT_STACK_CAPACITY: usize = 100;
/// Default maximum length of a numeric literal, in characters.
pub const DEFAULT_MAX_TOKEN_LEN: usize = 100;
/// Default number of digits printed after the decimal point.
pub const DEFAULT_PRECISION: u16 = 6;
/// Default prompt printed before every input line.
pub const DEFAULT_PROMPT: &str = "> ";

/// Stores the tunable limits and output settings of a session.
///
/// ## Usage
///
/// `Config` is built once, either with [`Config::default`] or from the command
/// line, and shared by the tokenizer, the evaluator and the session driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Capacity of the operand stack.
    pub operand_capacity:  usize,
    /// Capacity of the operator stack.
    pub operator_capacity: usize,
    /// Longest numeric literal the tokenizer accepts.
    pub max_token_len:     usize,
    /// Digits printed after the decimal point of a result.
    pub precision:         u16,
    /// Prompt printed before every line, or `None` for a silent session.
    pub prompt:            Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self { operand_capacity:  DEFAULT_STACK_CAPACITY,
               operator_capacity: DEFAULT_STACK_CAPACITY,
               max_token_len:     DEFAULT_MAX_TOKEN_LEN,
               precision:         DEFAULT_PRECISION,
               prompt:            Some(DEFAULT_PROMPT.to_string()), }
    }
}

impl Config {
    /// Formats a result in fixed-point notation with the configured precision.
    ///
    /// # Example
    /// ```
    /// use shuntcalc::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.format_value(14.0), "14.000000");
    ///
    /// let config = Config { precision: 2, ..Config::default() };
    /// assert_eq!(config.format_value(-1.0 / 3.0), "-0.33");
    /// ```
    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = usize::from(self.precision))
    }
}
