//! The image and multimedia elements.

use super::*;

define_element!(area);

define_element!(audio);

define_element!(img);

define_element!(map);

define_element!(track);

define_element!(video);
