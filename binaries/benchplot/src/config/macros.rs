/// Declares a `benchplot` config struct and a `write_docs` function that turns
/// the doc comments of its fields into `##` comments of a [`toml_edit`] document.
///
/// # Attributes
/// - `#[child = true]`: the field is a config struct itself, its fields are documented too.
/// - `#[comment_out = true]`: the field is written commented out.
///
/// # Invariants
/// - the struct must implement [`Default`] and `serde`
/// - no field can be an [`Option`], every key must be present once serialized
///
/// # Documentation
/// Field docs follow this layout, wrapped at ~70 characters:
///
/// ```text
/// /// BRIEF DESCRIPTION.
/// ///
/// /// (optional) LONGER DESCRIPTION.
/// ///
/// /// Type         | (optional) FIELD TYPE
/// /// Valid values | EXPRESSION REPRESENTING VALID VALUES
/// /// Examples     | (optional) A FEW EXAMPLE VALUES
/// ```
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[child = $child:literal])?
                $(#[comment_out = $comment_out:literal])?
                $(#[doc = $doc:expr])*
                $(##[$field_meta:meta])*
                pub $field:ident: $field_ty:ty,
            )*
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            $(
                $(#[doc = $doc])*
                $(#[$field_meta])*
                pub $field: $field_ty,
            )*
        }

        impl $name {
            /// Prefix every key of `doc` with the doc comment of its field.
            pub fn write_docs(doc: &mut dyn ::toml_edit::TableLike) {
                $({
                    let key_str = stringify!($field);

                    #[allow(unused_mut, clippy::allow_attributes)]
                    let mut field_prefix = [ $(
                        format!("##{}\n", $doc),
                    )*].concat();

                    $(
                    if $comment_out {
                        field_prefix.push('#');
                    }
                    )?

                    $(
                    if $child {
                        if let Some(child) = doc
                            .get_key_value_mut(key_str)
                            .and_then(|(_, item)| item.as_table_like_mut())
                        {
                            <$field_ty>::write_docs(child);
                        }
                    }
                    )?

                    if doc.get(key_str).is_some_and(::toml_edit::Item::is_table) {
                        if let Some(table) = doc.get_mut(key_str).and_then(::toml_edit::Item::as_table_mut) {
                            table.decor_mut().set_prefix(format!("\n{field_prefix}"));
                        }
                    } else if let Some(mut key) = doc.key_mut(key_str) {
                        key.leaf_decor_mut().set_prefix(field_prefix);
                    }
                })*
            }
        }
    };
}

pub(crate) use config_struct;
