mod submit;
mod validate;
