//! Attribute, class and node names shared with the styling layer.

pub const DATA_ID: &str = "data-id";
pub const DATA_GROUP: &str = "data-group";
pub const DATA_SELECTED_ID: &str = "data-selected-id";
pub const DATA_OPTION: &str = "data-option";
pub const DATA_VISIBEL: &str = "data-visibel";
pub const DATA_LIST_ID: &str = "data-list-id";
pub const DATA_HIDDEN: &str = "data-hidden";

/// Values of [`DATA_VISIBEL`].
pub const VISIBEL: &str = "visibel";
pub const HIDDEN: &str = "hidden";

pub const ROLE: &str = "role";
pub const ARIA_PRESSED: &str = "aria-pressed";

pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_GROUP: &str = "group";
pub const CLASS_ITEM_WRAPPER: &str = "item-wrapper";
pub const CLASS_CHECKBOX: &str = "checkbox";
pub const CLASS_SUB_GROUP_WRAPPER: &str = "sub-group-dropdown-wrapper";
pub const CLASS_SUB_GROUP_TOGGLE: &str = "sub-group-dropdown";
pub const CLASS_SUB_GROUP_LIST: &str = "sub-group-dropdown-list";
pub const CLASS_SUB_GROUP_OPTION: &str = "sub-group-option";
pub const CLASS_EMPTY: &str = "empty";
pub const CLASS_BADGE: &str = "badge";

/// Node ids appended to the container at mount.
pub const SELECTED_LIST_BODY: &str = "selectedListBody";
pub const DROPDOWN_BODY: &str = "dropdownBody";
