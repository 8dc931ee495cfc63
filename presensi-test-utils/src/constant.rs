pub static TEST_CLASS_ID: &str = "kelas-x-ipa-1";
pub static TEST_CLASS_NAME: &str = "X IPA 1";
pub static TEST_OTHER_CLASS_ID: &str = "kelas-x-ipa-2";
pub static TEST_OTHER_CLASS_NAME: &str = "X IPA 2";

/// Message carried by every injected endpoint failure
pub static INJECTED_FAILURE: &str = "injected failure";
