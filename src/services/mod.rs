pub mod cool_text;
