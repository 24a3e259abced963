pub use crate::{
    collections::*,
    command::{Command, Interpreter, Reply, Stats},
    error::*,
    values::*,
};
