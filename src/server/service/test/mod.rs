mod livery;
