//! The table elements.

use super::*;

define_element!(caption);

define_element!(col);

define_element!(colgroup);

define_element!(table);

define_element!(tbody);

define_element!(td);

define_element!(tfoot);

define_element!(th);

define_element!(thead);

define_element!(tr);
