mod amount_editor;
mod page_elements;
mod swag_editor;
