//! A call-by-value evaluator over the normalized tree.
//!
//! It follows the evaluation order of the JavaScript output (operator, then
//! operand, then call; binder-led groups apply left to right), so the values
//! it computes are the values the compiled programs compute.

#![allow(dead_code)]

use sel_syntax::{Expr, Program};
use std::collections::HashMap;
use std::rc::Rc;

pub type EvalResult<'a> = Result<Value<'a>, String>;

#[derive(Clone)]
pub enum Value<'a> {
    Closure {
        param: &'a str,
        body: &'a Expr,
        env: Env<'a>,
    },
    Native(fn(Value<'a>) -> EvalResult<'a>),
    Int(u64),
    Marker(&'static str),
}

impl Value<'_> {
    fn describe(&self) -> String {
        match self {
            Value::Closure { param, .. } => format!("closure over {param}"),
            Value::Native(_) => "native function".to_string(),
            Value::Int(n) => format!("integer {n}"),
            Value::Marker(name) => format!("marker {name}"),
        }
    }
}

#[derive(Clone, Default)]
pub struct Env<'a>(Option<Rc<Frame<'a>>>);

struct Frame<'a> {
    name: &'a str,
    value: Value<'a>,
    parent: Env<'a>,
}

impl<'a> Env<'a> {
    fn bind(&self, name: &'a str, value: Value<'a>) -> Self {
        Env(Some(Rc::new(Frame {
            name,
            value,
            parent: self.clone(),
        })))
    }

    fn lookup(&self, name: &str) -> Option<&Value<'a>> {
        let mut env = self;
        while let Some(frame) = &env.0 {
            if frame.name == name {
                return Some(&frame.value);
            }
            env = &frame.parent;
        }
        None
    }
}

#[derive(Default)]
pub struct Machine<'a> {
    globals: HashMap<&'a str, Value<'a>>,
}

impl<'a> Machine<'a> {
    /// Evaluate every top-level expression in order. Declarations extend the
    /// global scope; the value of the last other expression is returned.
    pub fn run(&mut self, program: &'a Program) -> Result<Option<Value<'a>>, String> {
        let mut last = None;
        for expr in &program.body {
            match expr {
                Expr::Declaration { name, value } => {
                    let value = self.eval(value, &Env::default())?;
                    self.globals.insert(name, value);
                }
                other => last = Some(self.eval(other, &Env::default())?),
            }
        }
        Ok(last)
    }

    fn eval(&self, expr: &'a Expr, env: &Env<'a>) -> EvalResult<'a> {
        match expr {
            Expr::Atom { name } => env
                .lookup(name)
                .or_else(|| self.globals.get(name.as_str()))
                .cloned()
                .ok_or_else(|| format!("unbound name {name}")),
            Expr::Lambda { param, body } => Ok(Value::Closure {
                param,
                body,
                env: env.clone(),
            }),
            Expr::Application { operator, operand } => {
                let function = self.eval(operator, env)?;
                let argument = self.eval(operand, env)?;
                self.apply(function, argument)
            }
            Expr::Group { children } => {
                let mut members = children.iter();
                let first = members.next().ok_or("empty group")?;
                let mut value = self.eval(first, env)?;
                for member in members {
                    let argument = self.eval(member, env)?;
                    value = self.apply(value, argument)?;
                }
                Ok(value)
            }
            Expr::Declaration { name, .. } => Err(format!("declaration of {name} in expression")),
        }
    }

    pub fn apply(&self, function: Value<'a>, argument: Value<'a>) -> EvalResult<'a> {
        match function {
            Value::Closure { param, body, env } => self.eval(body, &env.bind(param, argument)),
            Value::Native(native) => native(argument),
            other => Err(format!("cannot apply {}", other.describe())),
        }
    }

    /// Decode a Church numeral by counting applications of a successor.
    pub fn to_number(&self, value: Value<'a>) -> Result<u64, String> {
        let counted = self.apply(value, Value::Native(successor))?;
        match self.apply(counted, Value::Int(0))? {
            Value::Int(n) => Ok(n),
            other => Err(format!("numeral produced {}", other.describe())),
        }
    }

    /// Decode a Church boolean by letting it choose between two markers.
    pub fn to_bool(&self, value: Value<'a>) -> Result<bool, String> {
        let chosen = self.apply(value, Value::Marker("true"))?;
        match self.apply(chosen, Value::Marker("false"))? {
            Value::Marker("true") => Ok(true),
            Value::Marker("false") => Ok(false),
            other => Err(format!("boolean produced {}", other.describe())),
        }
    }
}

fn successor(value: Value<'_>) -> EvalResult<'_> {
    match value {
        Value::Int(n) => Ok(Value::Int(n + 1)),
        other => Err(format!("successor of {}", other.describe())),
    }
}

/// Compile `source` after the base library.
pub fn with_base(source: &str) -> Program {
    sel_syntax::compile(&format!("{}\n{source}", sel::source::BASE)).expect("program compiles")
}

pub fn eval_number(source: &str) -> u64 {
    let program = with_base(source);
    let mut machine = Machine::default();
    let value = machine.run(&program).unwrap().expect("a final expression");
    machine.to_number(value).unwrap()
}

pub fn eval_bool(source: &str) -> bool {
    let program = with_base(source);
    let mut machine = Machine::default();
    let value = machine.run(&program).unwrap().expect("a final expression");
    machine.to_bool(value).unwrap()
}
