pub static SITE_NAME: &str = "MSP Tech Club - MIU";
