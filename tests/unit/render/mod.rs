mod canvas;
