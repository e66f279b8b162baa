use std::collections::HashMap;

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::console::Console,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the variable environment
/// mapping names to their current values. The environment is flat, the
/// language has no scopes, and it persists for as long as the `Context`
/// lives, which is what lets an interactive session accumulate state line
/// by line.
///
/// ## Usage
///
/// `Context` is created once per session or script run. Expression
/// evaluation (`eval`) borrows it immutably; statements (`eval_statement`,
/// `run`) take it mutably because only statements may bind variables.
pub struct Context {
    variables: HashMap<String, f64>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new() }
    }

    /// Looks up the current value of a variable.
    ///
    /// # Example
    /// ```
    /// use contar::interpreter::evaluator::core::Context;
    ///
    /// let context = Context::new();
    /// assert_eq!(context.get("x"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches on the expression variant; operands of binary
    /// operations evaluate depth-first, left before right. Expression
    /// evaluation never modifies the environment, which the shared borrow
    /// of `self` also enforces.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Errors
    /// `UnknownVariable` for a reference to an unbound name, and
    /// `DivisionByZero` from a division whose right operand is zero.
    ///
    /// # Example
    /// ```
    /// use contar::{ast::Expr, interpreter::evaluator::core::Context};
    ///
    /// let context = Context::new();
    /// assert_eq!(context.eval(&Expr::Number(2.5)).unwrap(), 2.5);
    /// assert!(context.eval(&Expr::Variable("x".to_string())).is_err());
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number(value) => Ok(*value),
            Expr::Variable(name) => {
                self.get(name)
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone() })
            },
            Expr::UnaryOp { op, expr } => self.eval_unary(*op, expr),
            Expr::BinaryOp { left, op, right } => self.eval_binary(*op, left, right),
        }
    }

    /// Evaluates a single statement, applying its side effects.
    ///
    /// Statements are where the environment changes and where console
    /// traffic happens:
    /// - an assignment binds the evaluated value, then notifies
    ///   `name = value`.
    /// - a read prompts through the console, parses the input line as a
    ///   number, binds it, and then notifies like an assignment.
    /// - a print writes the evaluated value on its own.
    /// - a bare expression writes `Result: value`.
    ///
    /// A failing statement leaves the environment untouched: every binding
    /// happens only after its value evaluated successfully.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    /// - `console`: Collaborator receiving prompts and notifications.
    ///
    /// # Errors
    /// Any `RuntimeError` raised while evaluating the statement's
    /// expression or while reading input.
    pub fn eval_statement<C: Console>(&mut self,
                                      statement: &Statement,
                                      console: &mut C)
                                      -> EvalResult<()> {
        match statement {
            Statement::Assignment { name, value } => {
                let value = self.eval(value)?;
                self.variables.insert(name.clone(), value);
                console.write_line(&format!("{name} = {value}"));
                Ok(())
            },

            Statement::Read { name } => {
                let input = console.read_line(&format!("Enter a value for {name}: "))?;
                let value: f64 = input.trim()
                                      .parse()
                                      .map_err(|_| RuntimeError::InvalidInput)?;
                self.variables.insert(name.clone(), value);
                console.write_line(&format!("{name} = {value}"));
                Ok(())
            },

            Statement::Print { expr } => {
                let value = self.eval(expr)?;
                console.write_line(&value.to_string());
                Ok(())
            },

            Statement::Expression { expr } => {
                let value = self.eval(expr)?;
                console.write_line(&format!("Result: {value}"));
                Ok(())
            },
        }
    }

    /// Runs a whole program against this context.
    ///
    /// Statements execute in source order; the first runtime error stops
    /// execution. Effects of statements that already completed persist,
    /// both in the environment and on the console.
    ///
    /// # Parameters
    /// - `program`: The parsed program to execute.
    /// - `console`: Collaborator receiving prompts and notifications.
    ///
    /// # Errors
    /// The first `RuntimeError` raised by a statement, if any.
    pub fn run<C: Console>(&mut self, program: &Program, console: &mut C) -> EvalResult<()> {
        for statement in &program.statements {
            self.eval_statement(statement, console)?;
        }
        Ok(())
    }
}
