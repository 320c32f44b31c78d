mod file_io;
