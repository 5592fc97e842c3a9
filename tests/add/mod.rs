mod add_path_outside_repository_fails;
mod add_same_content_stores_one_object;
mod readding_a_file_replaces_its_entry;
