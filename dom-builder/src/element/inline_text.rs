//! The inline text elements.

use super::*;

define_element!(a);

define_element!(abbr);

define_element!(b);

define_element!(bdi);

define_element!(bdo);

define_element!(br);

define_element!(cite);

define_element!(code);

define_element!(data);

define_element!(dfn);

define_element!(em);

define_element!(i);

define_element!(kbd);

define_element!(mark);

define_element!(q);

define_element!(s);

define_element!(samp);

define_element!(small);

define_element!(span);

define_element!(strong);

define_element!(sub);

define_element!(sup);

define_element!(time);

define_element!(u);

define_element!(var);
