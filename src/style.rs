//! Card Stylesheet
//!
//! Injected into the card's own subtree so the card carries its look
//! wherever the host mounts it. Colors lean on the host's theme
//! variables with plain fallbacks.

pub const STYLE: &str = r#"
.shopping-lists-card {
  padding: 16px;
}
.shopping-lists-card .header {
  font-size: 1.4em;
  padding-bottom: 8px;
  color: var(--primary-text-color, #212121);
}
.shopping-lists-card table {
  width: 100%;
  border-collapse: collapse;
}
.shopping-lists-card th {
  text-align: left;
  font-weight: 500;
  color: var(--secondary-text-color, #727272);
  padding-bottom: 4px;
}
.shopping-lists-card .td {
  padding: 4px 0;
  border-top: 1px solid var(--divider-color, #e0e0e0);
}
.shopping-lists-card .td-count {
  text-align: right;
}
.shopping-lists-card .pointer {
  cursor: pointer;
}
.shopping-lists-card button {
  background: none;
  border: none;
  cursor: pointer;
  font-size: 1em;
  padding: 0 4px;
  color: var(--primary-color, #03a9f4);
}
.shopping-lists-card ul {
  list-style: none;
  margin: 0;
  padding: 0 0 0 24px;
}
.shopping-lists-card li {
  display: flex;
  justify-content: space-between;
  padding: 2px 0;
}
.shopping-lists-card li > div {
  flex-grow: 1;
}
.shopping-lists-card .crossed-off {
  text-decoration: line-through;
  color: var(--secondary-text-color, #727272);
}
.shopping-lists-card .new-item input {
  width: 85%;
  border: none;
  border-bottom: 1px solid var(--primary-color, #03a9f4);
  background: transparent;
  color: var(--primary-text-color, #212121);
  outline: none;
  padding: 4px 0;
}
"#;
