mod view_models;
