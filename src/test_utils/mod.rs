#![allow(missing_docs)]

pub(crate) mod db;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use db::{
    TestDatabase, insert_test_account, insert_test_goal, insert_test_merchant,
    insert_test_transaction,
};
pub(crate) use form::{assert_form_input, assert_form_select, assert_form_submit_button, must_get_form};
pub(crate) use html::{assert_valid_html, parse_html_document, text_of};
pub(crate) use http::{assert_content_type, get_header};
