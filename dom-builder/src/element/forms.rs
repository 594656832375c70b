//! The form elements.

use super::*;

define_element!(button);

define_element!(datalist);

define_element!(fieldset);

define_element!(form);

define_element!(input);

define_element!(label);

define_element!(legend);

define_element!(meter);

define_element!(optgroup);

define_element!(option);

define_element!(output);

define_element!(progress);

define_element!(select);

define_element!(textarea);
