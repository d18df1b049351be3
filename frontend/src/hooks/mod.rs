pub mod use_family_form;
