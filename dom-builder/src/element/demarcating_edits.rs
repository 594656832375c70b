//! The elements about demarcating edits.

use super::*;

define_element!(del);

define_element!(ins);
