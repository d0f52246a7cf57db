mod curtain;
