use crate::toc::ListType;

pub fn default_selector() -> String {
    crate::source::DEFAULT_SELECTOR.to_string()
}

pub fn default_list_type() -> ListType {
    ListType::Unordered
}
