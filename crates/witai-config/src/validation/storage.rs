use super::helpers::validate_not_blank;
use crate::schema::WitaiConfig;

pub(crate) fn validate_storage(errors: &mut Vec<String>, config: &WitaiConfig) {
    if let Some(ref path) = config.storage.path {
        validate_not_blank(errors, "storage.path", path);
    }
}
