//! The elements about text content.

use super::*;

define_element!(blockquote);

define_element!(dd);

define_element!(div);

define_element!(dl);

define_element!(dt);

define_element!(figcaption);

define_element!(figure);

define_element!(hr);

define_element!(li);

define_element!(menu);

define_element!(ol);

define_element!(p);

define_element!(pre);

define_element!(ul);
