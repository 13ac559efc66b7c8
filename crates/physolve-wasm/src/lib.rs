use physolve_lang::run;
use wasm_bindgen::prelude::*;

/// Build an entity of type `kind` from `input` and return its target's value,
/// or the entity itself when no target was given.
#[wasm_bindgen]
pub fn evaluate(kind: &str, input: &str) -> String {
    match run(kind, input) {
        Ok(eval) => match eval.result {
            Some(result) => result.to_string(),
            None => eval.entity.to_string(),
        },
        Err(e) => e.to_string(),
    }
}
