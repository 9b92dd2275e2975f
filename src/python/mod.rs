//! Python bindings for the TARGET X game core.
//!
//! # Quick Start
//!
//! ```python
//! import target_x
//!
//! session = target_x.Session(seed=7)
//! session.select_difficulty("medium")
//! session.select_mode("race")
//!
//! for card in ["9", "×", "7"]:
//!     session.play(card)
//!
//! print(session.current_value, session.target)
//! ```

use pyo3::prelude::*;

mod py_session;

pub use py_session::*;

/// target_x: the TARGET X arithmetic card game.
///
/// This module provides:
/// - `Session`, a full game from the menu to game over
/// - `evaluate`, the expression evaluator over card labels
/// - `card_points`, the points badge for a card label
#[pymodule]
fn target_x(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySession>()?;
    m.add_function(wrap_pyfunction!(evaluate, m)?)?;
    m.add_function(wrap_pyfunction!(card_points, m)?)?;
    Ok(())
}
