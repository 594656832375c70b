//! The elements about content sectioning.

use super::*;

define_element!(address);

define_element!(article);

define_element!(aside);

define_element!(footer);

define_element!(header);

define_element!(h1);

define_element!(h2);

define_element!(h3);

define_element!(h4);

define_element!(h5);

define_element!(h6);

define_element!(main);

define_element!(nav);

define_element!(section);
