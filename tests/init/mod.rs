mod init_creates_metadata_layout;
