mod project_repository;
